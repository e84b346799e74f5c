//! # Sked Core Library
//!
//! The scheduling core behind the `sked` task manager: a deterministic
//! next-date engine for compact repeat rules, and a small SQLite-backed task
//! store with the lifecycle rules built on top of it.
//!
//! ## Features
//!
//! - **Compact Repeat Rules**: `d 7`, `y`, `w 1,3,5`, `m 1,-1 1,6`
//! - **End-of-Month Awareness**: `-1` and `-2` follow the real length of each
//!   month, leap Februaries included
//! - **Pure Engine**: no clock, no I/O, identical inputs give identical dates
//! - **Injected Storage**: the scheduler works against any [`repository::TaskRepository`]
//!
//! ## Core Modules
//!
//! - [`date`]: `YYYYMMDD` codec and calendar helpers
//! - [`recurrence`]: Rule parsing and next-date resolution
//! - [`models`]: Task records, inputs and filters
//! - [`db`]: Database connection and migration management
//! - [`repository`]: Data access layer with Repository pattern
//! - [`scheduler`]: Add, edit, complete, delete and list tasks
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use sked_core::{
//!     db, models::NewTaskData, repository::SqliteRepository, scheduler::TaskScheduler,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("scheduler.db").await?;
//!     let scheduler = TaskScheduler::new(SqliteRepository::new(pool));
//!
//!     let task = scheduler
//!         .add_task(
//!             NewTaskData {
//!                 title: "Pay rent".to_string(),
//!                 repeat: "m 1".to_string(),
//!                 ..Default::default()
//!             },
//!             Local::now().date_naive(),
//!         )
//!         .await?;
//!     println!("Next due: {}", task.date);
//!
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod scheduler;
