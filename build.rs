fn main() {
    // UniFFI scaffolding comes from setup_scaffolding!() in lib.rs and the
    // proc-macro derives in uniffi_bindings.rs
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
