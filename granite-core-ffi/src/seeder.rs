//! The seeder builders handed to the engine constructors.

use crate::utils::{catch_panic, get_mut_checked, ENGINE_CALL_ERR, ENGINE_CALL_OK};
use granite_core::prelude::{Seeder, UnixSeeder};
use std::os::raw::c_int;

/// An opaque object producing the seeders the engines are built from.
///
/// The builder outlives the seeder it hands to an engine constructor: it can be used to build
/// several engines, and must be destroyed exactly once through [`destroy_seeder_builder`].
pub struct SeederBuilder {
    factory: Box<dyn Fn() -> Box<dyn Seeder>>,
}

impl SeederBuilder {
    pub(crate) fn create_seeder(&self) -> Box<dyn Seeder> {
        (self.factory)()
    }
}

/// Create a [`SeederBuilder`] producing unix seeders.
///
/// The secret is split in two 64 bits halves for the convenience of callers lacking a 128
/// bits integer type.
#[no_mangle]
pub unsafe extern "C" fn new_unix_seeder_builder(
    secret_high: u64,
    secret_low: u64,
    result: *mut *mut SeederBuilder,
) -> c_int {
    catch_panic(|| {
        let Ok(result) = get_mut_checked(result) else {
            return ENGINE_CALL_ERR;
        };
        // First fill the result with a null ptr so that if we fail and the return code is not
        // checked, then any access to the result pointer will segfault (mimics malloc on
        // failure)
        *result = std::ptr::null_mut();

        let secret = ((secret_high as u128) << 64) | (secret_low as u128);
        let builder = SeederBuilder {
            factory: Box::new(move || Box::new(UnixSeeder::new(secret))),
        };
        *result = Box::into_raw(Box::new(builder));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of [`new_unix_seeder_builder`].
#[no_mangle]
pub unsafe extern "C" fn new_unix_seeder_builder_unchecked(
    secret_high: u64,
    secret_low: u64,
    result: *mut *mut SeederBuilder,
) -> c_int {
    catch_panic(|| {
        *result = std::ptr::null_mut();

        let secret = ((secret_high as u128) << 64) | (secret_low as u128);
        let builder = SeederBuilder {
            factory: Box::new(move || Box::new(UnixSeeder::new(secret))),
        };
        *result = Box::into_raw(Box::new(builder));
        ENGINE_CALL_OK
    })
}

/// Return `true` if the unix seeder is available on the target.
#[no_mangle]
pub extern "C" fn unix_seeder_is_available() -> bool {
    UnixSeeder::is_available()
}

/// Destroy a [`SeederBuilder`].
#[no_mangle]
pub unsafe extern "C" fn destroy_seeder_builder(builder: *mut SeederBuilder) -> c_int {
    catch_panic(|| {
        if builder.is_null() {
            return ENGINE_CALL_ERR;
        }
        drop(Box::from_raw(builder));
        ENGINE_CALL_OK
    })
}

/// [Unchecked](crate#unchecked-symbols) version of [`destroy_seeder_builder`].
#[no_mangle]
pub unsafe extern "C" fn destroy_seeder_builder_unchecked(builder: *mut SeederBuilder) -> c_int {
    catch_panic(|| {
        drop(Box::from_raw(builder));
        ENGINE_CALL_OK
    })
}
