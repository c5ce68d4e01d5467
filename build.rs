// SPDX-License-Identifier: Apache-2.0

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=ESCARGOT_LIB_DIR");

    // Link against an installed libescargot when one is provided. Unit
    // tests run against an in-process engine stand-in and need no native
    // library.
    if let Ok(dir) = env::var("ESCARGOT_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
        println!("cargo:rustc-link-lib=dylib=escargot");
    }
}
