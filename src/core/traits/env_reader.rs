/// Port for reading the variables the platform injects.
///
/// Returns the value for `name`, or an empty string when the variable
/// is absent. The core only depends on this trait; production code binds
/// it to the process environment, tests to an in-memory map.
pub trait EnvReader {
    fn get(&self, name: &str) -> String;
}

impl<F> EnvReader for F
where
    F: Fn(&str) -> String,
{
    fn get(&self, name: &str) -> String {
        self(name)
    }
}
