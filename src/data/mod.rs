pub mod items;
pub mod species;
pub mod type_chart;
