//! Machine learning actions (`_ml`).
use super::Operation;
use crate::{
    ActionError,
    arguments::{ArgumentError, Arguments},
    client::MachineLearning,
    params::ParameterValidation,
    path::pathify,
    request::Request,
    transport::Transport,
};
use http::Method;
use serde_json::Value;

const DATA_FRAME_ANALYTICS: &str = "_ml/data_frame/analytics";

pub static GET_DATA_FRAME_ANALYTICS: Operation = Operation {
    name: "ml.get_data_frame_analytics",
    required: &[],
    params: &["allow_no_match", "from", "size"],
};

pub static DELETE_DATA_FRAME_ANALYTICS: Operation = Operation {
    name: "ml.delete_data_frame_analytics",
    required: &["id"],
    params: &["force"],
};

pub(crate) fn get_data_frame_analytics_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = GET_DATA_FRAME_ANALYTICS.assemble(arguments)?;
    let id = assembly.take_segment("id");
    let path = pathify([DATA_FRAME_ANALYTICS, id.as_str()]);
    assembly.finish(Method::GET, path, None, validation)
}

pub(crate) fn delete_data_frame_analytics_request(
    arguments: &Arguments,
    validation: ParameterValidation,
) -> Result<Request, ArgumentError> {
    let mut assembly = DELETE_DATA_FRAME_ANALYTICS.assemble(arguments)?;
    let id = assembly.take_segment("id");
    let path = pathify([DATA_FRAME_ANALYTICS, id.as_str()]);
    assembly.finish(Method::DELETE, path, None, validation)
}

impl<T: Transport> MachineLearning<'_, T> {
    /// Retrieves data frame analytics jobs, all of them unless `id` is given.
    pub async fn get_data_frame_analytics(
        &self,
        arguments: &Arguments,
    ) -> Result<Value, ActionError<T::Error>> {
        let request =
            get_data_frame_analytics_request(arguments, self.client.parameter_validation())?;
        Ok(self.client.perform_request(request).await?.body)
    }

    /// Deletes an existing data frame analytics job.
    ///
    /// # Arguments
    ///
    /// * `id` - The job to delete (*required*).
    /// * `force` - Delete the job even if it is running.
    pub async fn delete_data_frame_analytics(
        &self,
        arguments: &Arguments,
    ) -> Result<Value, ActionError<T::Error>> {
        let request =
            delete_data_frame_analytics_request(arguments, self.client.parameter_validation())?;
        Ok(self.client.perform_request(request).await?.body)
    }
}
