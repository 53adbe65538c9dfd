use skpapi_core::SuResult;
use std::env;
use std::fmt::Write;
use std::path::PathBuf;

/// C declaration of `SUResult`, enumerators named after the SDK identifiers.
fn su_result_declaration() -> String {
    let mut decl = String::from(
        "/* Outcome of a SketchUp C API call. */\n\
         enum SUResult\n\
         #ifdef __cplusplus\n  : int32_t\n#endif // __cplusplus\n {\n",
    );
    for result in SuResult::ALL {
        let _ = writeln!(decl, "  /* {} */", result.description());
        let _ = writeln!(decl, "  {} = {},", result.name(), result.code());
    }
    decl.push_str("};\n#ifndef __cplusplus\ntypedef int32_t SUResult;\n#endif // __cplusplus\n");
    decl
}

fn main() {
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=../skpapi-core/src");

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let include_dir = crate_dir.join("include");

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .expect("Unable to read cbindgen.toml");

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .with_after_include(su_result_declaration())
        .generate()
        .expect("Unable to generate C bindings");

    bindings.write_to_file(out_dir.join("skpapi_ffi.h"));

    std::fs::create_dir_all(&include_dir).expect("Unable to create include directory");
    bindings.write_to_file(include_dir.join("skpapi_ffi.h"));
}
