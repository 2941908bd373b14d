// dataforge-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contract for the external publishing collaborator.
pub mod ports;

// 2. Domain (Cœur du métier)
// Dataset model, dimension pools, date sampler, the seven generators.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// CSV persistence, run configuration, BI server REST adapter.
pub mod infrastructure;

// 4. Application (Use Cases)
// Dataset registry / orchestration of a generation run.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Permet d'importer l'erreur principale facilement : use dataforge_core::DataforgeError;
pub use error::DataforgeError;
