pub mod lookup_region;
pub mod lookup_regions;

pub use lookup_region::LookupRegionUseCase;
pub use lookup_regions::LookupRegionsUseCase;
