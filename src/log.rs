#[macro_export]
macro_rules! debug {
    ($context:expr, $console:expr, $template:literal $(, $value:expr)* $(,)?) => {
        if $context.options().debug {
            $crate::log!($console, $template $(, $value)*);
        }
    };
}

#[macro_export]
macro_rules! log {
    ($console:expr, $template:literal $(, $value:expr)* $(,)?) => {
        $console.write_stderr(
            ("handin: ".to_owned() + &format!($template $(, $value)*) + "\n").as_bytes(),
        ).await?;
    };
}
