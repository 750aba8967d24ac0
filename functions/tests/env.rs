use functions::{Context, InvocationContext};

// Runs in its own test binary so the environment is set before the variables are first read.
#[test]
fn context_from_environment() {
    std::env::set_var("FUNC_HANDLER", "say_hello");
    std::env::set_var("FUNC_DIRECTORY", "site/say_hello");

    let first = InvocationContext::from_env().unwrap();
    let second = InvocationContext::from_env().unwrap();

    assert_eq!(first.function_name(), "say_hello");
    assert!(std::path::Path::new(first.function_directory()).is_absolute());
    assert!(first.function_directory().ends_with("say_hello"));
    assert_ne!(first.invocation_id(), second.invocation_id());
    assert_eq!(first.invocation_id().len(), 36);
}
