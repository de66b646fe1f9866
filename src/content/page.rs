//! Page chrome and prose: header, hero, feature cards, guide, footer.

use super::snippets::Snippet;

pub const HEADER_TITLE: &str = "Spring Boot Kafka Pact Demo";
pub const GITHUB_LABEL: &str = "GitHub";
pub const GITHUB_URL: &str = "https://github.com/yourusername/spring-kafka-pact-demo";

pub const HERO_TITLE: &str = "Spring Boot + Kafka + Pact Testing";
pub const HERO_SUBTITLE: &str = "A demonstration of contract testing with Pact in a Spring Boot \
application using Kafka for message-based communication";

pub const OVERVIEW_TITLE: &str = "Technical Overview";
pub const STRUCTURE_TITLE: &str = "Project Structure";
pub const GUIDE_TITLE: &str = "Getting Started";

pub const FOOTER_COPYRIGHT: &str = "© 2025 Spring Boot Kafka Pact Demo";
pub const FOOTER_LINKS: [&str; 3] = ["Documentation", "API", "Support"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Spring Boot 3.3.1",
        description: "Built with the latest Spring Boot and Java 17",
        body: "Modern application framework with autoconfiguration, dependency injection, \
and embedded server.",
    },
    FeatureCard {
        title: "Apache Kafka",
        description: "Stream processing for event-driven architecture",
        body: "Listen to string messages from Kafka topics with Spring's integration support \
for asynchronous messaging.",
    },
    FeatureCard {
        title: "Pact Testing",
        description: "Consumer-driven contract testing",
        body: "Test your consumer and provider interactions independently with Pact to ensure \
contract compliance.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideBody {
    List(&'static [&'static str]),
    Code(Snippet),
}

/// A card in the Getting Started section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStep {
    pub title: &'static str,
    pub body: GuideBody,
}

const fn bash(code: &'static str) -> GuideBody {
    GuideBody::Code(Snippet {
        title: None,
        language: Some("bash"),
        code,
    })
}

pub const GUIDE_STEPS: [GuideStep; 4] = [
    GuideStep {
        title: "Prerequisites",
        body: GuideBody::List(&[
            "Java 17 or higher",
            "Maven 3.6+",
            "Docker (for running Kafka locally)",
        ]),
    },
    GuideStep {
        title: "Running Kafka",
        body: bash(
            "# Start Kafka using Docker Compose
docker-compose up -d

# Verify Kafka is running
docker-compose ps",
        ),
    },
    GuideStep {
        title: "Building and Running",
        body: bash(
            "# Clone the repository
git clone https://github.com/yourusername/spring-kafka-pact-demo.git
cd spring-kafka-pact-demo

# Build the project
./mvnw clean package

# Run the application
./mvnw spring-boot:run",
        ),
    },
    GuideStep {
        title: "Running Tests",
        body: bash(
            "# Run unit and integration tests
./mvnw test

# Run only Pact tests
./mvnw test -Dtest=\"*Pact*\"

# Generate Pact files
./mvnw pact:publish",
        ),
    },
];

pub const GUIDE_ACTION: &str = "View Full Documentation";

/// Text of the fallback page for undefined routes.
pub mod not_found {
    pub const CODE: &str = "404";
    pub const TITLE: &str = "Page Not Found";
    pub const MESSAGE: &str = "The page you're looking for doesn't exist or has been moved.";
    pub const ACTION: &str = "Back to Home";
}
