//! Named mutations: reusable procedures that edit the data map in place.
//!
//! Mutations receive an exclusive borrow of the live map for the duration of
//! the call. They bypass effects and do not persist on their own.

mod mutation;

pub use mutation::Mutation;
pub(crate) use mutation::MutationRegistry;
