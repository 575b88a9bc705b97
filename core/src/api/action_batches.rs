//! Action batches: grouped configuration changes submitted as one request.

operations! {
    /// Action batch endpoints of an organization.
    area ActionBatches, AsyncActionBatches;

    /// Create an action batch. `actions` is required; `confirmed` and
    /// `synchronous` default to false on the server.
    CREATE_ORGANIZATION_ACTION_BATCH = Post "/organizations/{organizationId}/actionBatches"
        => create_organization_action_batch(organization_id) {
            id: "createOrganizationActionBatch",
            tags: ["Action batches"],
            body: ["confirmed", "synchronous", "actions"],
            required: ["actions"],
        }

    /// Return the list of action batches in the organization.
    GET_ORGANIZATION_ACTION_BATCHES = Get "/organizations/{organizationId}/actionBatches"
        => get_organization_action_batches(organization_id) {
            id: "getOrganizationActionBatches",
            tags: ["Action batches"],
        }

    /// Return an action batch.
    GET_ORGANIZATION_ACTION_BATCH = Get "/organizations/{organizationId}/actionBatches/{actionBatchId}"
        => get_organization_action_batch(organization_id, action_batch_id) {
            id: "getOrganizationActionBatch",
            tags: ["Action batches"],
        }

    /// Delete an action batch.
    DELETE_ORGANIZATION_ACTION_BATCH = Delete "/organizations/{organizationId}/actionBatches/{actionBatchId}"
        => delete_organization_action_batch(organization_id, action_batch_id) {
            id: "deleteOrganizationActionBatch",
            tags: ["Action batches"],
        }

    /// Update an action batch. Once `confirmed` is true it cannot be unset.
    UPDATE_ORGANIZATION_ACTION_BATCH = Put "/organizations/{organizationId}/actionBatches/{actionBatchId}"
        => update_organization_action_batch(organization_id, action_batch_id) {
            id: "updateOrganizationActionBatch",
            tags: ["Action batches"],
            body: ["confirmed", "synchronous"],
        }
}
