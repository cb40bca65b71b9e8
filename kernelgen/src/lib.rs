//! SMM ACC kernel packer
//!
//! Collects the `smm_acc_<name>.h` CUDA/HIP kernel headers of a folder and
//! packs them into one C++ header, `smm_acc_kernels.h`, in which every
//! kernel body becomes a `std::string` named after the kernel. The JIT layer
//! includes that header and compiles the strings at runtime.
//!
//! # Usage
//!
//! ```no_run
//! use smm_acc_kernelgen::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::with_folder("./kernels"));
//! let report = generator.generate()?;
//! println!("{} kernels", report.kernel_count);
//! # Ok::<(), smm_acc_kernelgen::GenError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod logger;
pub mod scanner;
pub mod serializer;

pub use config::GeneratorConfig;
pub use document::OutputDocument;
pub use error::{GenError, Result};
pub use generator::{Generator, KernelFile, Report};
pub use scanner::{is_kernel_file_name, kernel_name, scan_kernel_folder};
pub use serializer::{KernelSerializer, ScanState, serialize_kernel, validate_identifier};
