pub mod buckets;
pub mod columns;
pub mod palette;
pub mod rows;
pub mod selection;
pub mod summary;
pub mod thresholds;
pub mod trial_names;
