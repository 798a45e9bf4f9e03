//! Cursor-based binary readers and writers.
//!
//! # Overview
//!
//! The [`ValueReader`] and [`ValueWriter`] traits provide sequential access to
//! fixed-width primitives (bytes, 32-bit integers, 64-bit floats) with an
//! explicit byte order. [`ValueReaderSlice`] reads from a borrowed byte slice,
//! [`ValueWriterBlob`] writes into an in-memory [`crate::Blob`]. Binary wire
//! formats are built on top of these; the traits manage the read/write
//! position so format code never touches raw offsets.

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
