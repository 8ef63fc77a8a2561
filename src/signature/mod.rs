//! Signature extraction
//!
//! Two layers:
//! - [`describe`] turns one member into a [`SignatureDescriptor`]
//! - [`TypeSignature`] collects the descriptors of every ordinary member of a type

pub mod descriptor;
pub mod type_signature;

pub use descriptor::{
    describe, AccessorSignature, InvocableSignature, ParameterNames, ParameterSignature,
    SignatureDescriptor,
};
pub use type_signature::TypeSignature;
