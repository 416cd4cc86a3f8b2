//! Versioned endpoint registry.
//!
//! The vendor moved most operations to new paths over time. Both path sets
//! are kept here and one of them is picked through [`ApiVersion`].

/// Path set of the render api.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Legacy paths: `/api/render/user/...`, `/api/render/task/...`.
    V1,
    /// Current paths: `/api/render/setUp/...`, `/api/render/handle/...`.
    #[default]
    V2,
}

/// Logical operations exposed by the render api.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Endpoint {
    /// List the render platforms available to the user.
    QueryPlatforms,
    /// Get the user profile.
    QueryUserProfile,
    /// Get the user settings.
    QueryUserSetting,
    /// Update the user settings.
    UpdateUserSetting,
    /// Get the transfer bids of the user.
    GetTransferBid,
    /// Get the raysync user key used by the transfer client.
    GetRaySyncUserKey,
    /// Get the address of the transfer servers.
    GetTransferServerInfo,
    /// Get the transfer configuration.
    GetTransferConfig,
    /// Create task ids before submitting.
    CreateTask,
    /// Submit a created task.
    SubmitTask,
    /// Upload the task json files.
    UploadTaskJson,
    /// Get the details of an analysis error code.
    QueryErrorDetail,
    /// List tasks.
    GetTaskList,
    /// Stop tasks.
    StopTask,
    /// Restart stopped tasks.
    StartTask,
    /// Abandon tasks.
    AbortTask,
    /// Delete tasks.
    DeleteTask,
    /// Change the priority of tasks.
    UpdateTaskUserLevel,
    /// Set the timeout after which tasks are stopped.
    SetTaskOverTimeStop,
    /// Render tasks at full speed.
    FullSpeedRendering,
    /// List the frames of a task.
    QueryTaskFrames,
    /// Get the frame statistics of the user.
    QueryAllFrameStats,
    /// Restart the failed frames of tasks.
    RestartFailedFrames,
    /// Restart given frames.
    RestartFrame,
    /// Get task details.
    QueryTaskInfo,
    /// Get the progress image of a task.
    LoadTaskProcessImg,
    /// Get the thumbnail of a frame.
    LoadingFrameThumbnail,
    /// Create a label.
    AddLabel,
    /// Delete a label.
    DeleteLabel,
    /// List labels.
    GetLabelList,
    /// Attach labels to tasks.
    AddTaskLabel,
    /// Detach labels from tasks.
    DeleteTaskLabel,
    /// List supported render software.
    QuerySupportedSoftware,
    /// List supported plugins of a software.
    QuerySupportedPlugin,
    /// Create a render environment.
    AddRenderEnv,
    /// Update a render environment.
    UpdateRenderEnv,
    /// Delete a render environment.
    DeleteRenderEnv,
    /// Make a render environment the default one.
    SetDefaultRenderEnv,
    /// List the render environments of a software.
    GetRenderEnv,
}

impl Endpoint {
    /// Resolve the api path of this endpoint.
    ///
    /// Returns `None` if the endpoint doesn't exist in the given version.
    pub fn path(self, version: ApiVersion) -> Option<&'static str> {
        match version {
            ApiVersion::V1 => self.v1_path(),
            ApiVersion::V2 => Some(self.v2_path()),
        }
    }

    fn v1_path(self) -> Option<&'static str> {
        use Endpoint::*;

        let path = match self {
            QueryPlatforms => "/api/render/common/queryPlatforms",
            QueryUserProfile => "/api/render/user/queryUserProfile",
            QueryUserSetting => "/api/render/user/queryUserSetting",
            UpdateUserSetting => "/api/render/user/updateUserSetting",
            GetTransferBid => "/api/render/task/getTransferBid",
            GetRaySyncUserKey => "/api/render/user/getRaySyncUserKey",
            GetTransferServerInfo => "/api/render/task/getTransferServerMsg",
            CreateTask => "/api/render/task/createTask",
            SubmitTask => "/api/render/task/submitTask",
            QueryErrorDetail => "/api/render/common/queryErrorDetail",
            GetTaskList => "/api/render/task/getTaskList",
            StopTask => "/api/render/task/stopTask",
            StartTask => "/api/render/task/startTask",
            AbortTask => "/api/render/task/abortTask",
            DeleteTask => "/api/render/task/deleteTask",
            UpdateTaskUserLevel => "/api/rendering/task/renderingTask/updateTaskUserLevel",
            SetTaskOverTimeStop => "/api/render/task/setOverTimeStop",
            FullSpeedRendering => "/api/render/task/fullSpeed",
            QueryTaskFrames => "/api/render/task/queryTaskFrames",
            QueryAllFrameStats => "/api/render/task/queryAllFrameStats",
            RestartFailedFrames => "/api/render/task/restartFailedFrames",
            RestartFrame => "/api/render/task/restartFrame",
            QueryTaskInfo => "/api/render/task/queryTaskInfo",
            LoadTaskProcessImg => "/api/render/task/loadTaskProcessImg",
            LoadingFrameThumbnail => "/api/render/task/loadingFrameThumbnail",
            AddLabel => "/api/render/common/addLabel",
            DeleteLabel => "/api/render/common/deleteLabel",
            GetLabelList => "/api/render/common/getLabelList",
            QuerySupportedSoftware => "/api/render/common/querySupportedSoftware",
            QuerySupportedPlugin => "/api/render/common/querySupportedPlugin",
            AddRenderEnv => "/api/render/common/addRenderEnv",
            UpdateRenderEnv => "/api/render/common/updateRenderEnv",
            DeleteRenderEnv => "/api/render/common/deleteRenderEnv",
            SetDefaultRenderEnv => "/api/render/common/setDefaultRenderEnv",
            GetRenderEnv => "/api/render/common/getRenderEnv",
            GetTransferConfig | UploadTaskJson | AddTaskLabel | DeleteTaskLabel => return None,
        };

        Some(path)
    }

    fn v2_path(self) -> &'static str {
        use Endpoint::*;

        match self {
            QueryPlatforms => "/api/render/common/queryPlatforms",
            QueryUserProfile => "/api/render/setUp/queryUserProfile",
            QueryUserSetting => "/api/render/setUp/queryUserSetting",
            UpdateUserSetting => "/api/render/setUp/updateUserSetting",
            GetTransferBid => "/api/render/transfer/getBid",
            GetRaySyncUserKey => "/api/render/transfer/getRaySyncUserKey",
            GetTransferServerInfo => "/api/render/transfer/getServerInfo",
            GetTransferConfig => "/api/render/transfer/getConfig",
            CreateTask => "/api/render/submit/createTask",
            SubmitTask => "/api/render/submit/task",
            UploadTaskJson => "/api/render/submit/taskJsonFile",
            QueryErrorDetail => "/api/render/submit/queryAnalyseErrorDetail",
            GetTaskList => "/api/render/handle/getTaskList",
            StopTask => "/api/rendering/task/renderingTask/stopTask",
            StartTask => "/api/rendering/task/renderingTask/startTask",
            AbortTask => "/api/render/handle/abandonTask",
            DeleteTask => "/api/render/handle/deleteTask",
            UpdateTaskUserLevel => "/api/rendering/task/renderingTask/updateTaskUserLevel",
            SetTaskOverTimeStop => "/api/render/handle/setTaskOverTimeStop",
            FullSpeedRendering => "/api/render/handle/fullSpeedRendering",
            QueryTaskFrames => "/api/render/handle/queryTaskFrames",
            QueryAllFrameStats => "/api/render/handle/queryAllFrameStats",
            RestartFailedFrames => "/api/render/handle/recommitTasks",
            RestartFrame => "/api/render/handle/recommitTaskFrames",
            QueryTaskInfo => "/api/render/handle/queryTaskInfo",
            LoadTaskProcessImg => "/api/render/handle/loadTaskProcessImg",
            LoadingFrameThumbnail => "/api/render/handle/loadingFrameThumbnail",
            AddLabel => "/api/render/project/add",
            DeleteLabel => "/api/render/project/delete",
            GetLabelList => "/api/render/project/getList",
            AddTaskLabel => "/api/render/handle/addTaskLabel",
            DeleteTaskLabel => "/api/render/handle/deleteTaskLabel",
            QuerySupportedSoftware => "/api/render/plugin/querySoftwareList",
            QuerySupportedPlugin => "/api/render/plugin/querySoftwareDetail",
            AddRenderEnv => "/api/render/plugin/addUserPluginConfig",
            UpdateRenderEnv => "/api/render/plugin/editUserPluginConfig",
            DeleteRenderEnv => "/api/render/plugin/deleteUserPluginConfig",
            SetDefaultRenderEnv => "/api/render/plugin/setDefaultUserPluginConfig",
            GetRenderEnv => "/api/render/plugin/getUserPluginConfig",
        }
    }
}
