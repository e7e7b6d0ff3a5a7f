pub use libgqlexec_core::*;

#[cfg(test)]
mod tests;
