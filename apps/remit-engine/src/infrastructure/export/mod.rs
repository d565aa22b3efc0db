//! Export adapters.

mod fs_writer;

pub use fs_writer::FsInstructionWriter;
