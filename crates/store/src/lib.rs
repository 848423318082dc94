//! Plan persistence — in-memory development store with the CRUD surface the
//! planner needs (by id and by owner, whole-document writes).

pub mod store;

pub use store::PlanStore;
