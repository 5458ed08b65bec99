pub mod core {
    pub mod ports;
    pub mod shipment;
    pub mod status_catalog;
}

pub mod application {
    pub mod errors;
    pub mod command_handlers {
        pub mod create_shipment;
        pub mod delete_shipment;
        pub mod update_shipment;
    }
    pub mod query_handlers {
        pub mod shipment_queries;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_store;
    }
}

pub mod shell;


#[cfg(test)]
pub mod tests {
    pub mod e2e {
        pub mod shipment_journey_tests;
    }
}
