pub mod section_view;
pub mod surface_view;

pub use section_view::SectionView;
pub use surface_view::SurfaceView;
