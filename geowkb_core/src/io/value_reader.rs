// This module defines the `ValueReader` trait for reading fixed-width values
// from a byte source.
//
// # Overview
//
// The `ValueReader` trait provides an interface for reading primitives such as
// bytes, 32-bit integers and 64-bit floating-point numbers from a data source
// with little-endian or big-endian byte order. Implementations manage the read
// position; every read advances it by the width of the value read, and reading
// past the end of the data fails instead of returning garbage.
//
// # Examples
//
// ```rust
// use geowkb_core::io::{ValueReader, ValueReaderSlice};
//
// let data = &[0x01, 0x02, 0x03, 0x04];
//
// let mut reader_le = ValueReaderSlice::new_le(data);
// assert_eq!(reader_le.read_u32()?, 0x04030201);
//
// let mut reader_be = ValueReaderSlice::new_be(data);
// assert_eq!(reader_be.read_u32()?, 0x01020304);
// ```

use crate::Blob;
use anyhow::Result;
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

/// A simple alias for types implementing both `Seek` and `Read`, used for convenience.
pub trait SeekRead: Seek + Read {}

/// A trait for reading fixed-width values from a byte source with a given byte order.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Sets the current position within the readable data.
	///
	/// # Errors
	/// Returns an error if the position lies outside the data.
	fn set_position(&mut self, position: u64) -> Result<()>;

	/// Checks if there is no data to read.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len() - self.position()
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads an unsigned 8-bit integer.
	///
	/// # Errors
	/// Returns an error if the end of the data has been reached.
	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	/// Reads an unsigned 32-bit integer in the reader's byte order.
	///
	/// # Errors
	/// Returns an error if fewer than four bytes remain.
	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.get_reader().read_u32::<E>()?)
	}

	/// Reads a 64-bit floating point number in the reader's byte order.
	///
	/// # Errors
	/// Returns an error if fewer than eight bytes remain.
	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	/// Reads a binary blob of the specified length.
	///
	/// # Errors
	/// Returns an error if fewer than `length` bytes remain.
	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		let mut blob = Blob::new_sized(length as usize);
		self.get_reader().read_exact(blob.as_mut_slice())?;
		Ok(blob)
	}
}
