/// makes sure traits are implemented
macro_rules! assert_trait {
    ($name:ident; $to_test:ty; $($trait:ident),*) => {
        ::paste::paste! {
            #[cfg(test)]
            #[allow(dead_code)]
            fn [<_$name:snake>]() {
                $(
                fn [<is_$trait:snake>]<T: $trait>() {}
                )*
                $([<is_$trait:snake>]::<$to_test>();)*
            }
        }
    };
}

pub(crate) use assert_trait;

/// Sets up `env_logger` once so `RUST_LOG=trace` shows what captures do
#[cfg(test)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
