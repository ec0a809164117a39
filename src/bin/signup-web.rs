#[cfg(target_arch = "wasm32")]
pub fn main() {
    signup_form::web::mount();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
