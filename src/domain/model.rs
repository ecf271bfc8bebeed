use crate::domain::ports::Animal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Dog {
    fn speak(&self) -> String {
        format!("Woof, my name is {}", self.name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> String {
        "Meow".to_string()
    }
}
