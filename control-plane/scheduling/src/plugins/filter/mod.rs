mod by_labels;

pub use by_labels::{by_labels_factory, ByLabels, BY_LABELS_FILTER_TYPE};
