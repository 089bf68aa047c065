pub mod metric_units;
