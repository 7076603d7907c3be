//! The next entry, still to be written.

// https://youtu.be/i_wDa2AS_8w?t=164
