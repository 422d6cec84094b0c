//! Infrastructure layer - store client implementations

pub mod storage;
