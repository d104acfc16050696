pub mod source;

pub use source::SampleTable;
