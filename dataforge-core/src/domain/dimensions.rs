// dataforge-core/src/domain/dimensions.rs
//
// Shared dimension pools. Fixed categorical value sets reused by every
// domain generator; immutable for the process lifetime.

pub const REGIONS: &[&str] = &["North", "South", "East", "West", "Central"];

pub const DEPARTMENTS: &[&str] = &[
    "Sales",
    "Marketing",
    "Engineering",
    "HR",
    "Finance",
    "Operations",
    "Customer Support",
    "R&D",
];

pub const COUNTRIES: &[&str] = &[
    "USA",
    "Canada",
    "UK",
    "Germany",
    "France",
    "Australia",
    "Japan",
    "Brazil",
    "India",
    "Mexico",
];
