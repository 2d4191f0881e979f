//! Integration tests for fargate-exec
//!
//! These tests spawn the actual binary and test end-to-end behavior that
//! does not need AWS credentials.
