error_chain! {
    foreign_links {
        // The doc comments have to be put after the item in this macro.
        Io(std::io::Error)
        /// An IO error.
        ;
        Json(serde_json::Error)
        /// An error while reading or writing the JSON network description.
        ;
    }

    errors {
        /// A node name was queried that is not part of the network.
        UnknownNode(name: String) {
            description("unknown node")
            display("unknown node: '{}'", name)
        }

        /// An edge references a node that is not part of the network.
        InvalidEdge(from: String, to: String) {
            description("edge references an unknown node")
            display("edge ('{}', '{}') references an unknown node", from, to)
        }

        /// An edge has a weight below zero.
        NegativeWeight(from: String, to: String, weight: String) {
            description("negative edge weight")
            display("edge ('{}', '{}') has negative weight {}", from, to, weight)
        }

        /// A node name is listed more than once.
        DuplicateNode(name: String) {
            description("duplicate node")
            display("duplicate node: '{}'", name)
        }

        /// An edge connects a node to itself.
        SelfLoop(name: String) {
            description("self loop")
            display("edge connects '{}' to itself", name)
        }

        /// Adding an edge makes the total weight of the network reach the infinite distance of its weight type.
        WeightOverflow(from: String, to: String, weight: String) {
            description("total edge weight too large")
            display("edge ('{}', '{}') with weight {} makes the total weight of the network too large", from, to, weight)
        }

        /// The same unordered pair of nodes is connected twice.
        DuplicateEdge(from: String, to: String) {
            description("duplicate edge")
            display("duplicate edge between '{}' and '{}'", from, to)
        }
    }
}
