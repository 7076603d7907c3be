//! Habit 6: reinterpreting memory by casting through pointers.
//!
//! Casting a `*const f32` to a `*const i32` and reading through it works right up until it
//! doesn't — alignment, validity and aliasing rules all get a say. When the goal is to look at
//! bytes, take an explicitly byte-typed view; when the goal is to move a value between types of
//! the same size, [`f32::to_bits`]-style conversions do it without a pointer in sight.


/// Reinterprets an integer *value* as an address, and the address back into an integer.
pub mod bad {
    pub fn int_pointer_round_trip() -> i64 {
        let x: i64 = 0;
        let xp = x as *const u8;
        xp as i64
    }
}

/// The Quake III fast inverse square root, bit pattern read through pointer casts.
pub mod worse {
    #[allow(clippy::assign_op_pattern)]
    pub fn inv_sqrt(x: f32) -> f32 {
        let half = 0.5 * x;
        // SAFETY: `f32` and `i32` share size and alignment, so the read stays in bounds — but
        // this is exactly the reinterpretation `f32::to_bits` spells without `unsafe`.
        let mut i = unsafe { *(&x as *const f32 as *const i32) };
        i = 0x5f37_59df - (i >> 1);
        // SAFETY: as above, in the other direction.
        let mut y = unsafe { *(&i as *const i32 as *const f32) };
        y = y * (1.5 - half * y * y);
        y
    }
}

/// Views a value's memory through an explicitly byte-typed slice.
pub mod good {
    use std::io::{self, Write};
    use std::slice;

    /// Borrows `input`'s memory as bytes.
    pub fn bytes_of<T>(input: &T) -> &[u8] {
        // SAFETY: every byte of a live `T` is readable as `u8` for the lifetime of the borrow.
        // Padding bytes, if `T` has any, come out as whatever happens to be there.
        unsafe { slice::from_raw_parts((input as *const T).cast::<u8>(), size_of::<T>()) }
    }

    /// Hex-dumps `input` one byte at a time.
    pub fn print_bytes<T, W: Write>(out: &mut W, input: &T) -> io::Result<()> {
        for byte in bytes_of(input) {
            write!(out, "{byte:02x} ")?;
        }
        writeln!(out)
    }
}

/// Value-level reinterpretation: the bits move, the types stay honest.
pub mod better {
    use std::io::{self, Write};

    /// Hex-dumps a float one byte at a time, without a single pointer cast.
    pub fn print_bytes<W: Write>(out: &mut W, input: f32) -> io::Result<()> {
        for byte in input.to_ne_bytes() {
            write!(out, "{byte:02x} ")?;
        }
        writeln!(out)
    }

    /// The same fast inverse square root, spelled with [`f32::to_bits`].
    pub fn inv_sqrt(x: f32) -> f32 {
        let half = 0.5 * x;
        let mut i = x.to_bits() as i32;
        i = 0x5f37_59df - (i >> 1);
        let mut y = f32::from_bits(i as u32);
        y *= 1.5 - half * y * y;
        y
    }
}
