use crate::core::{Animal, Cat, Demo, Dog};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use tracing::debug;

#[cfg(feature = "cli")]
use crate::config::DispatchConfig;

pub const DEFAULT_DOG_NAME: &str = "Buddy";

/// Writes whatever `animal` says as one line. The concrete type is resolved
/// through the vtable, so new animals need no change here.
pub fn make_animal_speak<W: Write + ?Sized>(out: &mut W, animal: &dyn Animal) -> Result<()> {
    let line = animal.speak();
    debug!("🐾 Dispatching speak(): {}", line);
    writeln!(out, "{}", line)?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct DispatchDemo {
    dog_name: String,
}

impl DispatchDemo {
    pub fn new(dog_name: impl Into<String>) -> Self {
        Self {
            dog_name: dog_name.into(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(config.dog_name.clone())
    }

    /// 固定順序：先狗後貓
    pub fn animals(&self) -> Vec<Box<dyn Animal>> {
        vec![Box::new(Dog::new(self.dog_name.clone())), Box::new(Cat)]
    }
}

impl Default for DispatchDemo {
    fn default() -> Self {
        Self::new(DEFAULT_DOG_NAME)
    }
}

#[async_trait]
impl Demo for DispatchDemo {
    fn name(&self) -> &str {
        "dispatch"
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        for animal in self.animals() {
            make_animal_speak(&mut *out, animal.as_ref())?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    struct Parrot {
        phrase: &'static str,
    }

    impl Animal for Parrot {
        fn speak(&self) -> String {
            format!("{}! {}!", self.phrase, self.phrase)
        }
    }

    fn speak_to_string(animal: &dyn Animal) -> String {
        let mut out = Vec::new();
        make_animal_speak(&mut out, animal).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_make_animal_speak_dog() {
        assert_eq!(speak_to_string(&Dog::new("Buddy")), "Woof, my name is Buddy\n");
    }

    #[test]
    fn test_make_animal_speak_cat() {
        assert_eq!(speak_to_string(&Cat), "Meow\n");
    }

    #[test]
    fn test_new_animal_needs_no_dispatch_change() {
        let parrot = Parrot { phrase: "Hello" };
        assert_eq!(speak_to_string(&parrot), "Hello! Hello!\n");
    }

    #[test]
    fn test_animals_lineup_order() {
        let spoken: Vec<String> = DispatchDemo::default()
            .animals()
            .iter()
            .map(|a| a.speak())
            .collect();
        assert_eq!(spoken, vec!["Woof, my name is Buddy", "Meow"]);
    }

    #[tokio::test]
    async fn test_default_demo_output() {
        let demo = DispatchDemo::default();
        assert_eq!(demo.name(), "dispatch");

        let mut out = Vec::new();
        assert_ok!(demo.run(&mut out).await);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Woof, my name is Buddy\nMeow\n"
        );
    }

    #[tokio::test]
    async fn test_custom_dog_name() {
        let mut out = Vec::new();
        assert_ok!(DispatchDemo::new("Rex").run(&mut out).await);
        assert_eq!(out, b"Woof, my name is Rex\nMeow\n");
    }
}
