// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing a loan application
// and the verdict produced for it.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The raw form input and the normalised applicant record
pub mod applicant;

// Approval / rejection verdicts and the label policy
pub mod verdict;

// Error types shared by every layer
pub mod errors;

// Core abstractions (traits) that other layers implement
pub mod traits;
