pub mod aerodynamics;
pub mod ascent;
pub mod descent;
