//! JNI entry points invoked by the host JVM.
//!
//! Symbol names follow the JNI mangling convention
//! (`Java_<package>_<Class>_<method>`) and are fixed by the Java-side native
//! method declarations; renaming anything here breaks `loadLibrary` linkage.
//! The three methods are deliberately kept independent of each other, one
//! per host class.

use jni::objects::JClass;
use jni::sys::jstring;
use jni::JNIEnv;

use crate::common::config;
use crate::common::error::GreetCode;
use crate::common::log::{log_json, Level};
use crate::greeting::service;

/// `void HelloPrinter.printGreeting()`: print the greeting to stdout.
#[no_mangle]
pub extern "system" fn Java_com_example_hello_HelloPrinter_printGreeting(
    _env: JNIEnv,
    _class: JClass,
) {
    let cfg = config::load_cfg();
    log_json(&cfg, Level::Debug, "ffi", "print_greeting", GreetCode::Ok);
    if let Err(err) = service::print_greeting() {
        // The method returns void, so a failed write is only observable here.
        log_json(&cfg, Level::Warn, "ffi", err.msg, err.code);
    }
}

/// `String HelloProvider.getGreeting()`: return the greeting as a new
/// JVM-owned string.
#[no_mangle]
pub extern "system" fn Java_com_example_hello_HelloProvider_getGreeting(
    env: JNIEnv,
    _class: JClass,
) -> jstring {
    let cfg = config::load_cfg();
    log_json(&cfg, Level::Debug, "ffi", "provider_get_greeting", GreetCode::Ok);
    match env.new_string(service::greeting_text()) {
        Ok(s) => s.into_inner(),
        Err(_) => {
            // new_string leaves a pending JVM exception; null tells the
            // caller the handle is unusable.
            log_json(&cfg, Level::Warn, "ffi", "new_string", GreetCode::StringAlloc);
            std::ptr::null_mut()
        }
    }
}

/// `String HelloSupplier.getGreeting()`: identical contract to the provider
/// method, exported under its own class symbol.
#[no_mangle]
pub extern "system" fn Java_com_example_hello_HelloSupplier_getGreeting(
    env: JNIEnv,
    _class: JClass,
) -> jstring {
    let cfg = config::load_cfg();
    log_json(&cfg, Level::Debug, "ffi", "supplier_get_greeting", GreetCode::Ok);
    match env.new_string(service::greeting_text()) {
        Ok(s) => s.into_inner(),
        Err(_) => {
            log_json(&cfg, Level::Warn, "ffi", "new_string", GreetCode::StringAlloc);
            std::ptr::null_mut()
        }
    }
}
