//! # gradcheck - Graduation Requirement Validation
//!
//! gradcheck decides whether a student meets the graduation requirements and
//! produces per-student and batch reports.
//!
//! ## Core Concepts
//!
//! - **Requirements**: enrollment, minimum average, welfare clearance and
//!   graduation fee payment. The set is fixed and always reported in that order.
//! - **Providers**: read-only sources of student facts, keyed by student code.
//!   Unknown codes resolve to an all-false record instead of an error.
//! - **Decisions**: the per-requirement outcomes plus their conjunction.
//!
//! ## Modules
//!
//! - [`student`] - Student records and the found/not-found lookup result
//! - [`provider`] - Student data provider trait, in-memory and file backends
//! - [`requirement`] - Requirement vocabulary, requirement sets and decisions
//! - [`validator`] - The graduation validator and the text report
//! - [`report`] - Batch reports in CSV, JSON and Markdown
//! - [`roster`] - Reading lists of student codes
//! - [`config`] - Configuration management
//!
//! ## Example
//!
//! ```
//! use gradcheck::provider::InMemoryStudentProvider;
//! use gradcheck::validator::GraduationValidator;
//!
//! let validator = GraduationValidator::new(InMemoryStudentProvider::reference());
//!
//! let decision = validator.validate_graduation_requirements("20210001");
//! assert!(decision.overall_pass());
//!
//! println!("{}", validator.generate_graduation_report("20210004"));
//! ```

pub mod config;
pub mod provider;
pub mod report;
pub mod requirement;
pub mod roster;
pub mod student;
pub mod ui;
pub mod validator;

pub use provider::StudentProvider;
pub use requirement::{GraduationDecision, Requirement, RequirementSet};
pub use student::{StudentLookup, StudentRecord};
pub use validator::GraduationValidator;
