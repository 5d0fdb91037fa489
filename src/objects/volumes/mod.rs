mod constant_medium;

pub use constant_medium::ConstantMedium;
