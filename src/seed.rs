//! Seed facts inserted on first startup
//!
//! The list order matters: the day-of-year selector indexes into the facts
//! in insertion order, so reordering this list shifts the daily mapping.

use crate::db::NewFact;

/// The full seed list (tech facts first, then general trivia)
pub fn seed_facts() -> Vec<NewFact> {
    let mut all = Vec::with_capacity(TECH_FACTS.len() + GENERAL_FACTS.len());
    all.extend_from_slice(TECH_FACTS);
    all.extend_from_slice(GENERAL_FACTS);
    all
}

const TECH_FACTS: &[NewFact] = &[
    NewFact {
        content: "The first computer mouse was made of wood.",
        category: "tech",
        image_url: Some("https://images.unsplash.com/photo-1615219463990-25816f1a8e10?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "The QWERTY keyboard was designed to slow down typists so their typewriters wouldn't jam.",
        category: "tech",
        image_url: Some("https://images.unsplash.com/photo-1587829741301-dc798b91ddce?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "More people in the world have mobile phones than toilets.",
        category: "tech",
        image_url: Some("https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "The first domain name ever registered was Symbolics.com on March 15, 1985.",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "A single Google query uses 1,000 computers in 0.2 seconds.",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "The average computer user blinks 7 times a minute, less than half the normal rate of 20.",
        category: "tech",
        image_url: Some("https://images.unsplash.com/photo-1517694712202-14dd9538aa97?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "30,000 websites are hacked every day.",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "The first 1GB hard drive was announced in 1980, weighed 550 pounds, and cost $40,000.",
        category: "tech",
        image_url: Some("https://images.unsplash.com/photo-1531297461136-82lwDe43qRm?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Email existed before the World Wide Web.",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "The Firefox logo isn't a fox; it's a red panda.",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "NASA's internet speed is 91 GB per second.",
        category: "tech",
        image_url: Some("https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "The first alarm clock could only ring at 4 a.m.",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "Samsung is 38 years and 1 month older than Apple.",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "The first text message simply said \"Merry Christmas\".",
        category: "tech",
        image_url: None,
    },
    NewFact {
        content: "Amazon sells more ebooks than printed books.",
        category: "tech",
        image_url: None,
    },
];

const GENERAL_FACTS: &[NewFact] = &[
    NewFact {
        content: "Bananas are curved because they grow towards the sun.",
        category: "nature",
        image_url: Some("https://images.unsplash.com/photo-1603833665858-e61d17a86224?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still edible.",
        category: "nature",
        image_url: Some("https://images.unsplash.com/photo-1587049352846-4a222e784d38?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Octopuses have three hearts.",
        category: "science",
        image_url: Some("https://images.unsplash.com/photo-1545671913-b89ac1b4ac10?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Cows have best friends and get stressed when they are separated.",
        category: "nature",
        image_url: Some("https://images.unsplash.com/photo-1570042225831-d98fa7577f1e?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "A cloud can weigh more than a million pounds.",
        category: "nature",
        image_url: Some("https://images.unsplash.com/photo-1534088568595-a066f410bcda?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "The Eiffel Tower can be 15 cm taller during the summer due to thermal expansion.",
        category: "history",
        image_url: Some("https://images.unsplash.com/photo-1511739001486-6bfe10ce7859?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Water can boil and freeze at the same time (Triple Point).",
        category: "science",
        image_url: None,
    },
    NewFact {
        content: "A snail can sleep for three years.",
        category: "nature",
        image_url: Some("https://images.unsplash.com/photo-1620922877543-4c902888636f?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Sloths can hold their breath longer than dolphins can (up to 40 minutes).",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "Oxford University is older than the Aztec Empire.",
        category: "history",
        image_url: Some("https://images.unsplash.com/photo-1592229505726-ca121723b8ef?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "The heart of a shrimp is located in its head.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "A rhinoceros' horn is made of hair.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "It takes a sloth two weeks to digest its food.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "The shortest war in history lasted 38 minutes.",
        category: "history",
        image_url: None,
    },
    NewFact {
        content: "The fingerprints of a koala are so indistinguishable from humans that they have on occasion been confused at a crime scene.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "The wood frog can hold its pee for up to eight months.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "Hot water turns to ice faster than cold water.",
        category: "science",
        image_url: None,
    },
    NewFact {
        content: "The tongue of a blue whale weighs more than an elephant.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "The only letter that doesn't appear on the periodic table is J.",
        category: "science",
        image_url: None,
    },
    NewFact {
        content: "A group of flamingos is called a \"flamboyance\".",
        category: "nature",
        image_url: Some("https://images.unsplash.com/photo-1533514114760-43846ba54bb4?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Tigers have striped skin, not just striped fur.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "Cleopatra lived closer in time to the Moon landing than to the construction of the Great Pyramid of Giza.",
        category: "history",
        image_url: None,
    },
    NewFact {
        content: "Wombat poop is cube-shaped.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "Butterflies taste with their feet.",
        category: "nature",
        image_url: Some("https://images.unsplash.com/photo-1557431518-1f8e3d83c2b0?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Sharks are the only fish that can blink with both eyes.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "An ostrich's eye is bigger than its brain.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "A day on Venus is longer than a year on Venus.",
        category: "science",
        image_url: Some("https://images.unsplash.com/photo-1614730341194-75c60740a070?q=80&w=1000&auto=format&fit=crop"),
    },
    NewFact {
        content: "Some cats are allergic to humans.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "The unicorn is the national animal of Scotland.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "Bees sometimes sting other bees.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "Humans share 50% of their DNA with bananas.",
        category: "science",
        image_url: None,
    },
    NewFact {
        content: "A cockroach can live for weeks without its head.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "The Great Wall of China is not visible from space with the naked eye.",
        category: "history",
        image_url: None,
    },
    NewFact {
        content: "Baby otters can't swim.",
        category: "nature",
        image_url: None,
    },
    NewFact {
        content: "Sound travels 4 times faster in water than in air.",
        category: "science",
        image_url: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_list_shape() {
        let facts = seed_facts();
        assert_eq!(facts.len(), 50);
        assert!(facts.iter().all(|f| !f.content.is_empty()));
        assert!(facts
            .iter()
            .all(|f| matches!(f.category, "tech" | "science" | "nature" | "history")));
    }
}
