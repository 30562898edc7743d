/// Rendering engine for petsciify.
///
/// Pure transformation stages: width-aware wrapping, the plain and
/// big-font text rasterizers, the outline post-process, and the
/// image-to-ASCII converter. Every stage turns its input into rows of
/// exactly content-width characters; framing happens last.
pub mod bigtext;
pub mod image;
pub mod outline;
pub mod plain;
pub mod wrap;
