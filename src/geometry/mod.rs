pub(crate) mod sampler;
pub(crate) mod serialize;
pub(crate) mod silhouette;
pub(crate) mod smooth;
