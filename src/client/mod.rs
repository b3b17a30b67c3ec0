//! Client surface: session opening and query submission.
//!
//! Keep the public surface small and predictable. Implementation details
//! live in submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::ChatClientBuilder;
pub use core::ChatClient;
