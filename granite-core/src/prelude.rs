//! A prelude module re-exporting the whole public surface of the library.
//!
//! ```rust
//! use granite_core::prelude::*;
//! ```

pub use crate::commons::dispersion::*;
pub use crate::commons::parameters::*;
pub use crate::specification::engines::*;
pub use crate::specification::entities::markers::*;
pub use crate::specification::entities::*;

#[cfg(feature = "backend_default")]
pub use crate::backends::default::*;

#[cfg(feature = "backend_fft")]
pub use crate::backends::fft::*;

pub use concrete_csprng::seeders::{Seed, Seeder};

#[cfg(feature = "seeder_unix")]
pub use concrete_csprng::seeders::UnixSeeder;

#[cfg(feature = "seeder_x86_64_rdseed")]
pub use concrete_csprng::seeders::RdseedSeeder;
