//! Access control adapters.

mod stub_checker;

pub use stub_checker::StubModeAccessChecker;
