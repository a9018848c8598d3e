//! Unit tests mirroring the layout of `src/`

mod algorithm;
mod io;
