pub mod static_pipeline;

pub use static_pipeline::StaticSitePipeline;
