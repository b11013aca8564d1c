/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use iot::input::{
    CreateAuthorizerInput, CreateFleetMetricInput, CreateProvisioningTemplateInput,
    CreateTopicRuleDestinationInput, DescribeCertificateInput, GetLoggingOptionsInput,
    ListTopicRulesInput,
};
use iot::model::{
    AggregationType, AggregationTypeName, HttpUrlDestinationConfiguration, ProvisioningHook,
    Tag, TopicRuleDestinationConfiguration,
};
use iot::operation::{CreateProvisioningTemplate, Operation};
use smithy_types::constraint::{ConstraintViolation, Validate};

fn template() -> iot::input::CreateProvisioningTemplateInputBuilder {
    CreateProvisioningTemplateInput::builder()
        .template_name("fleetTemplate1")
        .template_body("{}")
        .provisioning_role_arn("arn:aws:iam::123456789012:role/Provisioning")
}

#[test]
fn building_never_validates() {
    let input = CreateProvisioningTemplateInput::builder()
        .template_name("not valid!")
        .build();
    assert_eq!(input.template_name(), Some(&"not valid!".to_owned()));
    assert!(input.validate().is_err());
}

#[test]
fn complete_template_is_valid() {
    let input = template().enabled(true).build();
    assert_eq!(CreateProvisioningTemplate::validate_input(&input), Ok(()));
}

#[test]
fn required_members_are_reported_first() {
    let err = CreateProvisioningTemplateInput::builder()
        .build()
        .validate()
        .unwrap_err();
    assert_eq!(
        err,
        ConstraintViolation::Missing {
            path: "templateName".to_owned()
        }
    );
    let err = template().set_template_body(None).build().validate().unwrap_err();
    assert_eq!(err.path(), "templateBody");
}

#[test]
fn template_name_length_and_pattern() {
    let too_long = "a".repeat(37);
    let err = template().template_name(too_long).build().validate().unwrap_err();
    assert!(matches!(err, ConstraintViolation::Length { actual: 37, .. }));

    let err = template()
        .template_name("with space")
        .build()
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConstraintViolation::Pattern { .. }));
    assert_eq!(err.path(), "templateName");
}

#[test]
fn nested_paths_point_at_the_member() {
    let err = template()
        .tags(Tag::builder().key("env").value("prod").build())
        .tags(Tag::builder().value("orphan").build())
        .build()
        .validate()
        .unwrap_err();
    assert_eq!(err.path(), "tags[1].Key");
    assert_eq!(err.to_string(), "`tags[1].Key` is required but was not set");

    let err = template()
        .pre_provisioning_hook(ProvisioningHook::builder().payload_version("2020-04-01").build())
        .build()
        .validate()
        .unwrap_err();
    assert_eq!(err.path(), "preProvisioningHook.targetArn");

    let err = CreateTopicRuleDestinationInput::builder()
        .destination_configuration(
            TopicRuleDestinationConfiguration::builder()
                .http_url_configuration(HttpUrlDestinationConfiguration::builder().build())
                .build(),
        )
        .build()
        .validate()
        .unwrap_err();
    assert_eq!(
        err.path(),
        "destinationConfiguration.httpUrlConfiguration.confirmationUrl"
    );
}

#[test]
fn fleet_metric_period_bounds() {
    let metric = |period: i32| {
        CreateFleetMetricInput::builder()
            .metric_name("connected.devices")
            .query_string("connectivity.connected:true")
            .aggregation_type(
                AggregationType::builder()
                    .name(AggregationTypeName::Statistics)
                    .values("count")
                    .build(),
            )
            .period(period)
            .aggregation_field("registry.version")
            .build()
    };
    assert_eq!(metric(60).validate(), Ok(()));
    assert_eq!(metric(86400).validate(), Ok(()));
    assert_eq!(
        metric(59).validate(),
        Err(ConstraintViolation::Range {
            path: "period".to_owned(),
            actual: 59,
            min: Some(60),
            max: Some(86400),
        })
    );
    assert!(metric(86401).validate().is_err());
}

#[test]
fn certificate_ids_are_64_hex_digits() {
    let valid = "0123456789abcdef".repeat(4);
    let input = DescribeCertificateInput::builder().certificate_id(valid).build();
    assert_eq!(input.validate(), Ok(()));

    let input = DescribeCertificateInput::builder()
        .certificate_id("z".repeat(64))
        .build();
    assert!(matches!(
        input.validate(),
        Err(ConstraintViolation::Pattern { .. })
    ));
}

#[test]
fn authorizer_name_uses_word_characters() {
    let input = CreateAuthorizerInput::builder()
        .authorizer_name("my_authorizer=1")
        .authorizer_function_arn("arn:aws:lambda:us-east-1:123456789012:function:auth")
        .build();
    assert_eq!(input.validate(), Ok(()));
    let input = CreateAuthorizerInput::builder()
        .authorizer_name("my/authorizer")
        .authorizer_function_arn("arn")
        .build();
    assert_eq!(input.validate().map_err(|e| e.path().to_owned()), Err("authorizerName".to_owned()));
}

#[test]
fn unconstrained_and_optional_inputs() {
    assert_eq!(GetLoggingOptionsInput::builder().build().validate(), Ok(()));
    assert_eq!(ListTopicRulesInput::builder().build().validate(), Ok(()));
    let err = ListTopicRulesInput::builder()
        .max_results(0)
        .build()
        .validate()
        .unwrap_err();
    assert_eq!(err.path(), "maxResults");
}
