//! Test helpers for executor tests
//!
//! Common utilities for loading programs and building VMs

use crate::interpreter::executor::{Program, VM};
use crate::interpreter::parser;
use num_bigint::BigInt;
use std::collections::HashMap;

/// Load source, serialize/deserialize the program, and create a VM
///
/// The JSON round trip checks that loaded programs survive `rpnloop ast`
/// style dumps unchanged.
pub fn load_and_build_vm(source: &str) -> VM {
    let program = parser::load(source);
    let json = serde_json::to_string(&program).expect("Program serialization failed");
    let program: Program = serde_json::from_str(&json).expect("Program deserialization failed");

    VM::new(program)
}

/// Final variables as an unordered map, for order-insensitive assertions
pub fn vars_map(vm: &VM) -> HashMap<String, BigInt> {
    vm.vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Final variables as ordered pairs
pub fn vars_in_order(vm: &VM) -> Vec<(String, BigInt)> {
    vm.vars
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Shorthand for expected values
pub fn int(value: i64) -> BigInt {
    BigInt::from(value)
}
