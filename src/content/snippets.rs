//! Code samples shown in the Technical Overview tabs.

/// A fixed block of preformatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    pub title: Option<&'static str>,
    pub language: Option<&'static str>,
    pub code: &'static str,
}

/// One tab of the Technical Overview: a card holding several snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabContent {
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub snippets: &'static [Snippet],
}

pub const TAB_IDS: [&str; 4] = ["application", "kafka", "pact", "config"];

pub const DEFAULT_TAB: &str = "application";

const fn java(title: &'static str, code: &'static str) -> Snippet {
    Snippet {
        title: Some(title),
        language: Some("java"),
        code,
    }
}

const fn titled(title: &'static str, language: &'static str, code: &'static str) -> Snippet {
    Snippet {
        title: Some(title),
        language: Some(language),
        code,
    }
}

const KAFKA_PACT_APPLICATION: &str = r#"package com.example.demo;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class KafkaPactApplication {

    public static void main(String[] args) {
        SpringApplication.run(KafkaPactApplication.class, args);
    }
}"#;

const MESSAGE_SERVICE: &str = r#"package com.example.demo.service;

import com.example.demo.model.Message;

public interface MessageService {
    void processMessage(String payload);
    Message convertToMessage(String payload);
}"#;

const MESSAGE_SERVICE_IMPL: &str = r#"package com.example.demo.service;

import com.example.demo.model.Message;
import org.springframework.stereotype.Service;
import org.slf4j.Logger;
import org.slf4j.LoggerFactory;

@Service
public class MessageServiceImpl implements MessageService {

    private static final Logger logger = LoggerFactory.getLogger(MessageServiceImpl.class);

    @Override
    public void processMessage(String payload) {
        logger.info("Processing message: {}", payload);
        Message message = convertToMessage(payload);
        // Additional business logic here
    }

    @Override
    public Message convertToMessage(String payload) {
        // Simple implementation - would be more complex in a real app
        return new Message(payload);
    }
}"#;

const KAFKA_CONFIG: &str = r#"package com.example.demo.config;

import org.apache.kafka.clients.consumer.ConsumerConfig;
import org.apache.kafka.common.serialization.StringDeserializer;
import org.springframework.beans.factory.annotation.Value;
import org.springframework.context.annotation.Bean;
import org.springframework.context.annotation.Configuration;
import org.springframework.kafka.config.ConcurrentKafkaListenerContainerFactory;
import org.springframework.kafka.core.ConsumerFactory;
import org.springframework.kafka.core.DefaultKafkaConsumerFactory;

import java.util.HashMap;
import java.util.Map;

@Configuration
public class KafkaConfig {

    @Value("${spring.kafka.bootstrap-servers}")
    private String bootstrapServers;

    @Value("${spring.kafka.consumer.group-id}")
    private String groupId;

    @Bean
    public ConsumerFactory<String, String> consumerFactory() {
        Map<String, Object> props = new HashMap<>();
        props.put(ConsumerConfig.BOOTSTRAP_SERVERS_CONFIG, bootstrapServers);
        props.put(ConsumerConfig.GROUP_ID_CONFIG, groupId);
        props.put(ConsumerConfig.KEY_DESERIALIZER_CLASS_CONFIG, StringDeserializer.class);
        props.put(ConsumerConfig.VALUE_DESERIALIZER_CLASS_CONFIG, StringDeserializer.class);
        return new DefaultKafkaConsumerFactory<>(props);
    }

    @Bean
    public ConcurrentKafkaListenerContainerFactory<String, String> kafkaListenerContainerFactory() {
        ConcurrentKafkaListenerContainerFactory<String, String> factory =
                new ConcurrentKafkaListenerContainerFactory<>();
        factory.setConsumerFactory(consumerFactory());
        return factory;
    }
}"#;

const MESSAGE_LISTENER: &str = r#"package com.example.demo.listener;

import com.example.demo.service.MessageService;
import org.slf4j.Logger;
import org.slf4j.LoggerFactory;
import org.springframework.kafka.annotation.KafkaListener;
import org.springframework.stereotype.Component;

@Component
public class MessageListener {

    private static final Logger logger = LoggerFactory.getLogger(MessageListener.class);
    private final MessageService messageService;

    public MessageListener(MessageService messageService) {
        this.messageService = messageService;
    }

    @KafkaListener(topics = "${app.kafka.topic.name}")
    public void listen(String message) {
        logger.info("Received message: {}", message);
        messageService.processMessage(message);
    }
}"#;

const MESSAGE: &str = r#"package com.example.demo.model;

import java.time.LocalDateTime;

public class Message {
    private final String content;
    private final LocalDateTime timestamp;

    public Message(String content) {
        this.content = content;
        this.timestamp = LocalDateTime.now();
    }

    public String getContent() {
        return content;
    }

    public LocalDateTime getTimestamp() {
        return timestamp;
    }

    @Override
    public String toString() {
        return "Message{" +
                "content='" + content + '\'' +
                ", timestamp=" + timestamp +
                '}';
    }
}"#;

const MESSAGE_CONSUMER_PACT_TEST: &str = r#"package com.example.demo.pact.consumer;

import au.com.dius.pact.consumer.MessagePactBuilder;
import au.com.dius.pact.consumer.dsl.PactDslJsonBody;
import au.com.dius.pact.consumer.junit5.PactConsumerTestExt;
import au.com.dius.pact.consumer.junit5.PactTestFor;
import au.com.dius.pact.consumer.junit5.ProviderType;
import au.com.dius.pact.core.model.annotations.Pact;
import au.com.dius.pact.core.model.messaging.MessagePact;
import com.example.demo.model.Message;
import com.example.demo.service.MessageService;
import com.fasterxml.jackson.databind.ObjectMapper;
import org.junit.jupiter.api.Test;
import org.junit.jupiter.api.extension.ExtendWith;
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.boot.test.context.SpringBootTest;

import java.util.HashMap;
import java.util.Map;

import static org.junit.jupiter.api.Assertions.assertEquals;

@ExtendWith(PactConsumerTestExt.class)
@SpringBootTest
@PactTestFor(providerName = "message-provider", providerType = ProviderType.ASYNCH)
public class MessageConsumerPactTest {

    @Autowired
    private MessageService messageService;

    @Autowired
    private ObjectMapper objectMapper;

    @Pact(provider = "message-provider", consumer = "message-consumer")
    public MessagePact createPact(MessagePactBuilder builder) {
        PactDslJsonBody body = new PactDslJsonBody()
                .stringValue("content", "Hello, Pact!");

        Map<String, Object> metadata = new HashMap<>();
        metadata.put("contentType", "application/json");

        return builder
                .expectsToReceive("a message with content")
                .withMetadata(metadata)
                .withContent(body)
                .toPact();
    }

    @Test
    @PactTestFor(pactMethod = "createPact")
    public void testProcessMessage(byte[] messageContent) throws Exception {
        String messageString = new String(messageContent);

        // Test the service processes the message correctly
        Message message = messageService.convertToMessage(messageString);
        assertEquals("Hello, Pact!", message.getContent());
    }
}"#;

const MESSAGE_PROVIDER_PACT_TEST: &str = r#"package com.example.demo.pact.provider;

import au.com.dius.pact.provider.MessageAndMetadata;
import au.com.dius.pact.provider.PactVerifyProvider;
import au.com.dius.pact.provider.junit5.MessageTestTarget;
import au.com.dius.pact.provider.junit5.PactVerificationContext;
import au.com.dius.pact.provider.junit5.PactVerificationInvocationContextProvider;
import au.com.dius.pact.provider.junitsupport.Consumer;
import au.com.dius.pact.provider.junitsupport.Provider;
import au.com.dius.pact.provider.junitsupport.loader.PactFolder;
import com.example.demo.model.Message;
import com.fasterxml.jackson.databind.ObjectMapper;
import org.junit.jupiter.api.BeforeEach;
import org.junit.jupiter.api.TestTemplate;
import org.junit.jupiter.api.extension.ExtendWith;
import org.springframework.beans.factory.annotation.Autowired;
import org.springframework.boot.test.context.SpringBootTest;

import java.util.HashMap;
import java.util.Map;

@SpringBootTest
@Provider("message-provider")
@Consumer("message-consumer")
@PactFolder("src/test/resources/pacts")
public class MessageProviderPactTest {

    @Autowired
    private ObjectMapper objectMapper;

    @BeforeEach
    void setup(PactVerificationContext context) {
        context.setTarget(new MessageTestTarget());
    }

    @TestTemplate
    @ExtendWith(PactVerificationInvocationContextProvider.class)
    void verifyPact(PactVerificationContext context) {
        context.verifyInteraction();
    }

    @PactVerifyProvider("a message with content")
    public MessageAndMetadata verifyMessageForOrder() throws Exception {
        // Create the message that will be sent
        Message message = new Message("Hello, Pact!");

        // Convert to JSON
        String messageJson = objectMapper.writeValueAsString(message);

        // Set metadata
        Map<String, Object> metadata = new HashMap<>();
        metadata.put("contentType", "application/json");

        return new MessageAndMetadata(messageJson.getBytes(), metadata);
    }
}"#;

const APPLICATION_YML: &str = r#"spring:
  application:
    name: kafka-pact-demo
  kafka:
    bootstrap-servers: localhost:9092
    consumer:
      group-id: kafka-pact-demo
      auto-offset-reset: earliest

app:
  kafka:
    topic:
      name: message-topic"#;

const APPLICATION_TEST_YML: &str = r#"spring:
  kafka:
    bootstrap-servers: localhost:9092
    consumer:
      auto-offset-reset: earliest
      group-id: test-consumer-group

app:
  kafka:
    topic:
      name: test-message-topic"#;

const POM_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>

    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>3.3.1</version>
        <relativePath/>
    </parent>

    <groupId>com.example</groupId>
    <artifactId>kafka-pact-demo</artifactId>
    <version>0.0.1-SNAPSHOT</version>
    <name>kafka-pact-demo</name>
    <description>Demo project for Spring Boot with Kafka and Pact testing</description>

    <properties>
        <java.version>17</java.version>
        <pact.version>4.6.3</pact.version>
    </properties>

    <dependencies>
        <!-- Spring Boot -->
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-web</artifactId>
        </dependency>
        <dependency>
            <groupId>org.springframework.kafka</groupId>
            <artifactId>spring-kafka</artifactId>
        </dependency>

        <!-- Testing -->
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-test</artifactId>
            <scope>test</scope>
        </dependency>
        <dependency>
            <groupId>org.springframework.kafka</groupId>
            <artifactId>spring-kafka-test</artifactId>
            <scope>test</scope>
        </dependency>

        <!-- Pact -->
        <dependency>
            <groupId>au.com.dius.pact.consumer</groupId>
            <artifactId>junit5</artifactId>
            <version>${pact.version}</version>
            <scope>test</scope>
        </dependency>
        <dependency>
            <groupId>au.com.dius.pact.provider</groupId>
            <artifactId>junit5</artifactId>
            <version>${pact.version}</version>
            <scope>test</scope>
        </dependency>
    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>

            <!-- Pact Plugin -->
            <plugin>
                <groupId>au.com.dius.pact.provider</groupId>
                <artifactId>maven</artifactId>
                <version>${pact.version}</version>
                <configuration>
                    <pactDirectory>target/pacts</pactDirectory>
                    <pactBrokerUrl>http://localhost:9292</pactBrokerUrl>
                </configuration>
            </plugin>
        </plugins>
    </build>
</project>"#;

static TABS: [TabContent; 4] = [
    TabContent {
        id: "application",
        label: "Application",
        title: "Spring Boot Application",
        description: "Main application class with configuration",
        snippets: &[
            java("KafkaPactApplication.java", KAFKA_PACT_APPLICATION),
            java("MessageService.java", MESSAGE_SERVICE),
            java("MessageServiceImpl.java", MESSAGE_SERVICE_IMPL),
        ],
    },
    TabContent {
        id: "kafka",
        label: "Kafka",
        title: "Kafka Integration",
        description: "Configuration and listener components",
        snippets: &[
            java("KafkaConfig.java", KAFKA_CONFIG),
            java("MessageListener.java", MESSAGE_LISTENER),
            java("Message.java", MESSAGE),
        ],
    },
    TabContent {
        id: "pact",
        label: "Pact",
        title: "Pact Testing",
        description: "Consumer and provider contract tests",
        snippets: &[
            java("MessageConsumerPactTest.java", MESSAGE_CONSUMER_PACT_TEST),
            java("MessageProviderPactTest.java", MESSAGE_PROVIDER_PACT_TEST),
        ],
    },
    TabContent {
        id: "config",
        label: "Configuration",
        title: "Application Configuration",
        description: "YAML configuration files",
        snippets: &[
            titled("application.yml", "yaml", APPLICATION_YML),
            titled("application-test.yml", "yaml", APPLICATION_TEST_YML),
            titled("pom.xml", "xml", POM_XML),
        ],
    },
];

/// The Technical Overview tabs in display order.
pub fn tabs() -> &'static [TabContent] {
    &TABS
}

pub fn tab(id: &str) -> Option<&'static TabContent> {
    TABS.iter().find(|t| t.id == id)
}

/// Every titled snippet across all tabs, in display order.
pub fn all_snippets() -> impl Iterator<Item = &'static Snippet> {
    TABS.iter().flat_map(|t| t.snippets.iter())
}

/// Look up a snippet by its title, ignoring case.
pub fn find_snippet(title: &str) -> Option<&'static Snippet> {
    all_snippets().find(|s| s.title.is_some_and(|t| t.eq_ignore_ascii_case(title)))
}
