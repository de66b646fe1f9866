use crate::tree::TreeNode;

/// Name of the showcased project; also the tree root.
pub const PROJECT_NAME: &str = "spring-kafka-pact-demo";

fn folder(name: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::folder(name, children)
}

fn file(name: &str) -> TreeNode {
    TreeNode::file(name)
}

/// Layout of the demo project's source tree.
pub fn project_structure() -> TreeNode {
    folder(
        PROJECT_NAME,
        vec![
            folder(
                "src",
                vec![
                    folder(
                        "main",
                        vec![
                            folder(
                                "java/com/example/demo",
                                vec![
                                    file("KafkaPactApplication.java"),
                                    folder("config", vec![file("KafkaConfig.java")]),
                                    folder("listener", vec![file("MessageListener.java")]),
                                    folder("model", vec![file("Message.java")]),
                                    folder(
                                        "service",
                                        vec![
                                            file("MessageService.java"),
                                            file("MessageServiceImpl.java"),
                                        ],
                                    ),
                                ],
                            ),
                            folder(
                                "resources",
                                vec![file("application.yml"), file("application-test.yml")],
                            ),
                        ],
                    ),
                    folder(
                        "test",
                        vec![
                            folder(
                                "java/com/example/demo",
                                vec![
                                    folder(
                                        "pact",
                                        vec![
                                            folder(
                                                "consumer",
                                                vec![file("MessageConsumerPactTest.java")],
                                            ),
                                            folder(
                                                "provider",
                                                vec![file("MessageProviderPactTest.java")],
                                            ),
                                        ],
                                    ),
                                    folder("listener", vec![file("MessageListenerTest.java")]),
                                ],
                            ),
                            folder(
                                "resources",
                                vec![folder(
                                    "pacts",
                                    vec![file("message-consumer-message-provider.json")],
                                )],
                            ),
                        ],
                    ),
                ],
            ),
            file("pom.xml"),
            file("README.md"),
        ],
    )
}
