pub mod fs_cleanup;

pub use fs_cleanup::FsCleanup;
