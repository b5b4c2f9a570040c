//! Static CMMC control catalog: identifiers, names, descriptions, domains.
//!
//! Catalog ids use the CMMC numbering ("AC.1.001"). The Level 2 catalog is
//! the representative set shipped for display and reporting; scoring totals
//! always come from [`AssessmentLevel::total_controls`], never from catalog
//! length.

use crate::types::AssessmentLevel;

/// One catalog practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
  pub id: &'static str,
  pub name: &'static str,
  pub description: &'static str,
  pub domain: &'static str,
}

/// A CMMC domain (2-letter code + display name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
  pub id: &'static str,
  pub name: &'static str,
}

pub static DOMAINS: &[Domain] = &[
  Domain { id: "AC", name: "Access Control" },
  Domain { id: "AU", name: "Audit and Accountability" },
  Domain { id: "AT", name: "Awareness and Training" },
  Domain { id: "CM", name: "Configuration Management" },
  Domain { id: "IA", name: "Identification and Authentication" },
  Domain { id: "IR", name: "Incident Response" },
  Domain { id: "MA", name: "Maintenance" },
  Domain { id: "MP", name: "Media Protection" },
  Domain { id: "PS", name: "Personnel Security" },
  Domain { id: "PE", name: "Physical Protection" },
  Domain { id: "RA", name: "Risk Assessment" },
  Domain { id: "CA", name: "Security Assessment" },
  Domain { id: "SC", name: "System and Communications Protection" },
  Domain { id: "SI", name: "System and Information Integrity" },
];

/// The 17 Level 1 practices.
pub static LEVEL1_CONTROLS: &[Control] = &[
  Control {
    id: "AC.1.001",
    name: "Access Control",
    description: "Limit information system access to authorized users, processes acting on behalf of authorized users, or devices (including other information systems).",
    domain: "AC",
  },
  Control {
    id: "AC.1.002",
    name: "Limit Access to Transactions",
    description: "Limit information system access to the types of transactions and functions that authorized users are permitted to execute.",
    domain: "AC",
  },
  Control {
    id: "AC.1.003",
    name: "Verify and Control Connections",
    description: "Verify and control/limit connections to and use of external information systems.",
    domain: "AC",
  },
  Control {
    id: "AC.1.004",
    name: "Control Flow of CUI",
    description: "Control information flows between security domains on connected systems.",
    domain: "AC",
  },
  Control {
    id: "IA.1.076",
    name: "Identify Information System Users",
    description: "Identify information system users, processes acting on behalf of users, or devices.",
    domain: "IA",
  },
  Control {
    id: "IA.1.077",
    name: "Authenticate Users",
    description: "Authenticate (or verify) the identities of those users, processes, or devices, as a prerequisite to allowing access to organizational information systems.",
    domain: "IA",
  },
  Control {
    id: "MP.1.118",
    name: "Media Sanitization",
    description: "Sanitize or destroy information system media containing Federal Contract Information before disposal or release for reuse.",
    domain: "MP",
  },
  Control {
    id: "PE.1.131",
    name: "Limit Physical Access",
    description: "Limit physical access to organizational information systems, equipment, and the respective operating environments to authorized individuals.",
    domain: "PE",
  },
  Control {
    id: "PE.1.132",
    name: "Escort Visitors",
    description: "Escort visitors and monitor visitor activity.",
    domain: "PE",
  },
  Control {
    id: "PE.1.133",
    name: "Maintain Visitor Logs",
    description: "Maintain audit logs of physical access.",
    domain: "PE",
  },
  Control {
    id: "PE.1.134",
    name: "Control Physical Devices",
    description: "Control and manage physical access devices.",
    domain: "PE",
  },
  Control {
    id: "SC.1.175",
    name: "Monitor and Control Communications",
    description: "Monitor, control, and protect organizational communications (i.e., information transmitted or received by organizational information systems) at the external boundaries and key internal boundaries of the information systems.",
    domain: "SC",
  },
  Control {
    id: "SC.1.176",
    name: "Implement Subnetworks",
    description: "Implement subnetworks for publicly accessible system components that are physically or logically separated from internal networks.",
    domain: "SC",
  },
  Control {
    id: "SI.1.210",
    name: "Identify and Fix Vulnerabilities",
    description: "Identify, report, and correct information and information system flaws in a timely manner.",
    domain: "SI",
  },
  Control {
    id: "SI.1.211",
    name: "Protection From Malicious Code",
    description: "Provide protection from malicious code at appropriate locations within organizational information systems.",
    domain: "SI",
  },
  Control {
    id: "SI.1.212",
    name: "Security Updates",
    description: "Update malicious code protection mechanisms when new releases are available.",
    domain: "SI",
  },
  Control {
    id: "SI.1.213",
    name: "System Monitoring",
    description: "Perform periodic scans of the information system and real-time scans of files from external sources as files are downloaded, opened, or executed.",
    domain: "SI",
  },
];

/// Practices added at Level 2 (the Level 2 catalog is Level 1 plus these).
static LEVEL2_ADDITIONS: &[Control] = &[
  Control {
    id: "AC.2.005",
    name: "Provide Privacy and Security Notices",
    description: "Provide privacy and security notices consistent with applicable CUI rules.",
    domain: "AC",
  },
  Control {
    id: "AC.2.006",
    name: "Limit Use of Portable Storage",
    description: "Limit use of portable storage devices on external systems.",
    domain: "AC",
  },
  Control {
    id: "AC.2.007",
    name: "Least Privilege",
    description: "Employ the principle of least privilege, including for specific security functions and privileged accounts.",
    domain: "AC",
  },
  Control {
    id: "AC.2.008",
    name: "Unsuccessful Login Attempts",
    description: "Use session lock with pattern-hiding displays to prevent access and viewing of data after a period of inactivity.",
    domain: "AC",
  },
  Control {
    id: "AC.2.009",
    name: "Privacy and Security Notices",
    description: "Limit unsuccessful logon attempts.",
    domain: "AC",
  },
  Control {
    id: "AC.2.010",
    name: "Session Termination",
    description: "Use session termination to terminate user sessions after a defined condition.",
    domain: "AC",
  },
  Control {
    id: "AC.2.011",
    name: "Authorized Remote Execution",
    description: "Authorize remote execution of privileged commands and remote access to security-relevant information.",
    domain: "AC",
  },
  Control {
    id: "AC.2.013",
    name: "Remote Access",
    description: "Monitor and control remote access sessions.",
    domain: "AC",
  },
  Control {
    id: "AC.2.015",
    name: "Route Remote Access",
    description: "Route remote access via managed access control points.",
    domain: "AC",
  },
  Control {
    id: "AC.2.016",
    name: "Control Information Flows",
    description: "Control the flow of CUI in accordance with approved authorizations.",
    domain: "AC",
  },
  Control {
    id: "AU.2.041",
    name: "Audit Events",
    description: "Ensure that the actions of individual system users can be uniquely traced to those users so they can be held accountable for their actions.",
    domain: "AU",
  },
  Control {
    id: "AU.2.042",
    name: "Determine Event Information",
    description: "Create and retain system audit logs and records to the extent needed to enable the monitoring, analysis, investigation, and reporting of unlawful or unauthorized system activity.",
    domain: "AU",
  },
  Control {
    id: "AU.2.043",
    name: "Content of Audit Records",
    description: "Provide a system capability that compares and synchronizes internal system clocks with an authoritative source to generate time stamps for audit records.",
    domain: "AU",
  },
  Control {
    id: "AU.2.044",
    name: "Time Stamps",
    description: "Review audit logs.",
    domain: "AU",
  },
  Control {
    id: "AT.2.056",
    name: "Security Training",
    description: "Ensure that managers, system administrators, and users of organizational systems are made aware of the security risks associated with their activities and of the applicable policies, standards, and procedures related to the security of those systems.",
    domain: "AT",
  },
  Control {
    id: "AT.2.057",
    name: "Threat Awareness",
    description: "Ensure that personnel are trained to carry out their assigned information security-related duties and responsibilities.",
    domain: "AT",
  },
  Control {
    id: "CM.2.061",
    name: "Baseline Configuration",
    description: "Establish and maintain baseline configurations and inventories of organizational systems (including hardware, software, firmware, and documentation) throughout the respective system development life cycles.",
    domain: "CM",
  },
  Control {
    id: "CM.2.062",
    name: "Security Configuration",
    description: "Establish and enforce security configuration settings for information technology products employed in organizational systems.",
    domain: "CM",
  },
  Control {
    id: "CM.2.063",
    name: "Configuration Change Control",
    description: "Track, review, approve or disapprove, and log changes to organizational systems.",
    domain: "CM",
  },
  Control {
    id: "CM.2.064",
    name: "Security Impact Analysis",
    description: "Analyze the security impact of changes prior to implementation.",
    domain: "CM",
  },
  Control {
    id: "CM.2.065",
    name: "Least Functionality",
    description: "Define, document, approve, and enforce physical and logical access restrictions associated with changes to organizational systems.",
    domain: "CM",
  },
  Control {
    id: "CM.2.066",
    name: "Least Functionality",
    description: "Employ the principle of least functionality by configuring organizational systems to provide only essential capabilities.",
    domain: "CM",
  },
  Control {
    id: "IR.2.092",
    name: "Incident Response Training",
    description: "Establish an operational incident-handling capability for organizational systems that includes preparation, detection, analysis, containment, recovery, and user response activities.",
    domain: "IR",
  },
  Control {
    id: "IR.2.093",
    name: "Test Incident Response",
    description: "Detect and report events.",
    domain: "IR",
  },
  Control {
    id: "IR.2.094",
    name: "Incident Handling",
    description: "Analyze and triage events to determine if they are security incidents.",
    domain: "IR",
  },
  Control {
    id: "IR.2.096",
    name: "Incident Reporting",
    description: "Report events and security incidents to the appropriate stakeholders.",
    domain: "IR",
  },
  Control {
    id: "IR.2.097",
    name: "Incident Response Assistance",
    description: "Develop and implement responses to declared incidents according to pre-defined procedures.",
    domain: "IR",
  },
  Control {
    id: "MA.2.111",
    name: "Maintenance Procedures",
    description: "Perform maintenance on organizational systems.",
    domain: "MA",
  },
  Control {
    id: "MA.2.112",
    name: "Controlled Maintenance",
    description: "Provide controls on the tools, techniques, mechanisms, and personnel used to conduct system maintenance.",
    domain: "MA",
  },
  Control {
    id: "MA.2.113",
    name: "Maintenance Tools",
    description: "Require multifactor authentication to establish nonlocal maintenance sessions via external network connections and terminate such connections when nonlocal maintenance is complete.",
    domain: "MA",
  },
  Control {
    id: "MA.2.114",
    name: "Nonlocal Maintenance",
    description: "Supervise the maintenance activities of personnel without required access authorization.",
    domain: "MA",
  },
  Control {
    id: "MP.2.119",
    name: "Media Access",
    description: "Protect (i.e., physically control and securely store) system media containing CUI, both paper and digital.",
    domain: "MP",
  },
  Control {
    id: "MP.2.120",
    name: "Media Marking",
    description: "Mark media with necessary CUI markings and distribution limitations.",
    domain: "MP",
  },
  Control {
    id: "MP.2.121",
    name: "Media Storage",
    description: "Control access to media containing CUI and maintain accountability for media during transport outside of controlled areas.",
    domain: "MP",
  },
  Control {
    id: "PS.2.127",
    name: "Screen Personnel",
    description: "Screen individuals prior to authorizing access to organizational systems containing CUI.",
    domain: "PS",
  },
  Control {
    id: "PS.2.128",
    name: "Termination",
    description: "Ensure that CUI and organizational systems containing CUI are protected during and after personnel actions such as terminations and transfers.",
    domain: "PS",
  },
  Control {
    id: "PE.2.135",
    name: "Alternate Work Site",
    description: "Protect and monitor the physical facility and support infrastructure for organizational systems.",
    domain: "PE",
  },
  Control {
    id: "PE.2.136",
    name: "Controlling Visitor Access",
    description: "Implement safeguards to protect against physical access to systems at alternate work sites.",
    domain: "PE",
  },
  Control {
    id: "RA.2.141",
    name: "Risk Assessment",
    description: "Periodically assess the risk to organizational operations (including mission, functions, image, or reputation), organizational assets, and individuals, resulting from the operation of organizational systems and the associated processing, storage, or transmission of CUI.",
    domain: "RA",
  },
  Control {
    id: "RA.2.142",
    name: "Vulnerability Scanning",
    description: "Scan for vulnerabilities in organizational systems and applications periodically and when new vulnerabilities affecting those systems and applications are identified.",
    domain: "RA",
  },
  Control {
    id: "RA.2.143",
    name: "Remediate Vulnerabilities",
    description: "Remediate vulnerabilities in accordance with risk assessments.",
    domain: "RA",
  },
  Control {
    id: "CA.2.158",
    name: "Security Controls",
    description: "Develop, document, and periodically update system security plans that describe system boundaries, system environments of operation, how security requirements are implemented, and the relationships with or connections to other systems.",
    domain: "CA",
  },
  Control {
    id: "CA.2.159",
    name: "Plan of Action",
    description: "Develop and implement plans of action designed to correct deficiencies and reduce or eliminate vulnerabilities in organizational systems.",
    domain: "CA",
  },
  Control {
    id: "SC.2.178",
    name: "Prevent Unauthorized Connections",
    description: "Deny network communications traffic by default and allow network communications traffic by exception (i.e., deny all, permit by exception).",
    domain: "SC",
  },
  Control {
    id: "SC.2.179",
    name: "Architecture and Provisioning for Mobile Devices",
    description: "Implement architectural designs, software development techniques, and systems engineering principles that promote effective information security within organizational systems.",
    domain: "SC",
  },
  Control {
    id: "SC.2.181",
    name: "Session Authenticity",
    description: "Separate user functionality from system management functionality.",
    domain: "SC",
  },
  Control {
    id: "SC.2.183",
    name: "Mobile Code",
    description: "Prevent unauthorized and unintended information transfer via shared system resources.",
    domain: "SC",
  },
  Control {
    id: "SC.2.184",
    name: "Voice over Internet Protocol",
    description: "Implement cryptographic mechanisms to prevent unauthorized disclosure of CUI during transmission unless otherwise protected by alternative physical safeguards.",
    domain: "SC",
  },
  Control {
    id: "SI.2.214",
    name: "Security Alerts and Security Advisories",
    description: "Monitor system security alerts and advisories and take action in response.",
    domain: "SI",
  },
  Control {
    id: "SI.2.216",
    name: "Monitor Information System Connections",
    description: "Monitor organizational systems, including inbound and outbound communications traffic, to detect attacks and indicators of potential attacks.",
    domain: "SI",
  },
  Control {
    id: "SI.2.217",
    name: "Identify Unauthorized Use",
    description: "Identify unauthorized use of organizational systems.",
    domain: "SI",
  },
];

/// Catalog entries for an assessment level, in domain order.
pub fn controls_for_level(level: AssessmentLevel) -> Vec<&'static Control> {
  match level {
    AssessmentLevel::Level1 => LEVEL1_CONTROLS.iter().collect(),
    AssessmentLevel::Level2 => LEVEL1_CONTROLS
      .iter()
      .chain(LEVEL2_ADDITIONS.iter())
      .collect(),
  }
}

/// Look up a catalog entry by id across both levels.
pub fn find_control(control_id: &str) -> Option<&'static Control> {
  LEVEL1_CONTROLS
    .iter()
    .chain(LEVEL2_ADDITIONS.iter())
    .find(|control| control.id == control_id)
}

/// Display name for a 2-letter domain code.
pub fn domain_name(code: &str) -> Option<&'static str> {
  DOMAINS
    .iter()
    .find(|domain| domain.id == code)
    .map(|domain| domain.name)
}
