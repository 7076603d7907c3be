//! A catalogue of habits I keep catching in beginner Rust code (and, honestly, in my own first
//! drafts), each written up as a contrastive pair inside its own module: the habit as it usually
//! appears, next to the version I'd rather read.
//!
//! # Purpose
//! These notes started as a way of explaining the same handful of review comments once, instead of
//! once per review. Nothing here is a library to build on — the functions exist so that both sides
//! of every contrast compile, run and can be tested against each other.
//!
//! # Method
//! Each habit is a module and its variants are sub-modules (`bad`/`good`, with `worse`/`better`
//! tiers where the habit has them) holding a function of the same name, so the bodies read side by
//! side. The deliberately bad variants stay in the tree on purpose, carrying the `#[allow]`s and
//! `unsafe` blocks it takes to keep them compiling; the whole point is being able to look at both.
//!
//! # Catalogue
//! 1. [`imports`] — glob imports vs qualified paths vs selective `use`.
//! 2. [`flushing`] — flushing the stream once per line vs just writing a newline.
//! 3. [`iteration`] — index loops vs iterating the elements themselves.
//! 4. [`algorithms`] — hand-rolled search loops vs [`Iterator::position`].
//! 5. [`arrays`] — a raw pointer plus a separate length vs a bounds-tracked array reference.
//! 6. [`punning`] — pointer-cast reinterpretation vs byte views and [`f32::to_bits`].
//! 7. [`next`] — not written yet.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::unwrap_used)]

pub mod algorithms;
pub mod arrays;
pub mod flushing;
pub mod imports;
pub mod iteration;
pub mod next;
pub mod punning;

pub(crate) mod util;
