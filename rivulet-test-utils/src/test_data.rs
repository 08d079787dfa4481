// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Heterogeneous fixtures for operator tests.
//!
//! `TestData` mixes three unrelated record kinds so that type-narrowing and
//! null-handling operators have something to discriminate on.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plant {
    pub species: String,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    /// Narrows to the `Person` variant.
    pub fn into_person(self) -> Option<Person> {
        match self {
            Self::Person(p) => Some(p),
            _ => None,
        }
    }

    /// Narrows to the `Animal` variant.
    pub fn into_animal(self) -> Option<Animal> {
        match self {
            Self::Animal(a) => Some(a),
            _ => None,
        }
    }

    /// Narrows to the `Plant` variant.
    pub fn into_plant(self) -> Option<Plant> {
        match self {
            Self::Plant(p) => Some(p),
            _ => None,
        }
    }

    /// Name of a person or animal, species of a plant.
    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Animal(a) => &a.name,
            Self::Plant(p) => &p.species,
        }
    }

    /// Age for people, `None` otherwise.
    pub fn age(&self) -> Option<u32> {
        match self {
            Self::Person(p) => Some(p.age),
            _ => None,
        }
    }
}

pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(Person {
        name: name.to_string(),
        age,
    })
}

pub fn animal(name: &str, legs: u32) -> TestData {
    TestData::Animal(Animal {
        name: name.to_string(),
        legs,
    })
}

pub fn plant(species: &str, height: u32) -> TestData {
    TestData::Plant(Plant {
        species: species.to_string(),
        height,
    })
}

pub fn person_alice() -> TestData {
    person("Alice", 25)
}

pub fn person_bob() -> TestData {
    person("Bob", 30)
}

pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

pub fn plant_rose() -> TestData {
    plant("Rose", 15)
}

pub fn plant_oak() -> TestData {
    plant("Oak", 1000)
}

/// Alternating people, animals and plants, in a fixed order.
pub fn mixed_fixtures() -> Vec<TestData> {
    vec![
        person_alice(),
        animal_dog(),
        plant_rose(),
        person_bob(),
        animal_spider(),
        person_charlie(),
        plant_oak(),
    ]
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(p) => write!(f, "Person[name={}, age={}]", p.name, p.age),
            Self::Animal(a) => write!(f, "Animal[name={}, legs={}]", a.name, a.legs),
            Self::Plant(p) => write!(f, "Plant[species={}, height={}]", p.species, p.height),
        }
    }
}
