//! Built-in gallery dataset: five categories and the 2020–2030 events.

use crate::catalog::{Category, CategoryId, Event, EventId};

fn category(id: CategoryId, display_name: &str, color: &str) -> Category {
    Category {
        id,
        display_name: display_name.to_string(),
        color: color.to_string(),
    }
}

fn event(
    id: u32,
    year: i32,
    month: u8,
    category: CategoryId,
    importance: u8,
    title: &str,
    description: &str,
) -> Event {
    Event {
        id: EventId(id),
        year,
        month,
        title: title.to_string(),
        description: description.to_string(),
        category,
        importance,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category(CategoryId::Tech, "Technology", "#4285F4"),
        category(CategoryId::Science, "Science", "#34A853"),
        category(CategoryId::Society, "Society", "#FBBC05"),
        category(CategoryId::Environment, "Environment", "#EA4335"),
        category(CategoryId::Ai, "Artificial Intelligence", "#8F44AD"),
    ]
}

pub fn events() -> Vec<Event> {
    use CategoryId::*;

    vec![
        event(1, 2020, 3, Society, 9,
            "COVID-19 Pandemic",
            "Global pandemic that accelerated digital transformation and remote work adoption"),
        event(2, 2020, 7, Ai, 7,
            "GPT-3 Released",
            "OpenAI releases GPT-3, demonstrating unprecedented natural language processing capabilities"),
        event(3, 2021, 4, Science, 6,
            "First Successful Helicopter Flight on Mars",
            "NASA's Ingenuity helicopter makes the first powered, controlled flight on another planet"),
        event(4, 2021, 11, Tech, 7,
            "Metaverse Announced",
            "Facebook rebrands to Meta and announces focus on building the metaverse"),
        event(5, 2022, 3, Tech, 6,
            "Web3 Emergence",
            "Rise of Web3 technologies, including blockchain applications beyond cryptocurrency"),
        event(6, 2022, 11, Ai, 8,
            "ChatGPT Launch",
            "OpenAI releases ChatGPT, bringing advanced AI conversation capabilities to the mainstream"),
        event(7, 2023, 6, Ai, 8,
            "Advanced Generative AI",
            "Widespread adoption of generative AI for images, video, and code"),
        event(8, 2023, 9, Environment, 7,
            "Climate Action Acceleration",
            "Intensified global efforts to address climate change following extreme weather events"),
        event(9, 2024, 3, Ai, 8,
            "AI Regulation Framework",
            "Implementation of first comprehensive global AI regulation and ethics framework"),
        event(10, 2024, 9, Tech, 9,
            "Commercial Quantum Computing",
            "First commercially viable quantum computers reach the market"),
        event(11, 2025, 2, Ai, 10,
            "Artificial General Intelligence Milestone",
            "First AI system demonstrating capabilities across multiple domains at human-expert level"),
        event(12, 2025, 7, Tech, 8,
            "Advanced Brain-Computer Interfaces",
            "Non-invasive brain-computer interfaces enable direct mental control of devices"),
        event(13, 2026, 4, Tech, 7,
            "Autonomous Transportation Networks",
            "First cities implement fully autonomous transportation networks"),
        event(14, 2026, 11, Science, 10,
            "Fusion Energy Breakthrough",
            "Commercial fusion reactor achieves net positive energy production"),
        event(15, 2027, 3, Tech, 6,
            "Digital Twin Cities",
            "Major cities implement comprehensive digital twins for urban planning and management"),
        event(16, 2027, 8, Science, 9,
            "Bioprinted Organs",
            "First successful transplants of complex 3D-printed organs"),
        event(17, 2028, 1, Science, 10,
            "Lunar Colony",
            "Establishment of first permanent human colony on the Moon"),
        event(18, 2028, 9, Environment, 9,
            "Climate Restoration Projects",
            "Large-scale carbon capture and climate restoration projects show measurable success"),
        event(19, 2029, 5, Tech, 8,
            "Neural Network Human Augmentation",
            "Widespread adoption of neural augmentation for enhanced cognitive capabilities"),
        event(20, 2030, 2, Science, 10,
            "Mars Mission Launch",
            "First crewed mission departs for Mars"),
        event(21, 2030, 11, Environment, 9,
            "Global Renewable Energy Transition",
            "Majority of global energy production shifts to renewable sources"),
    ]
}
